mod lists_components_contract;
