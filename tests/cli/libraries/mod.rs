mod lists_library_index_contract;
