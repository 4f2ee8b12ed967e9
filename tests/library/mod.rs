mod create_public_api_contract;
