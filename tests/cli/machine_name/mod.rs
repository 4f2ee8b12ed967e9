mod suggests_machine_name_contract;
