mod rejects_duplicate_id_contract;
mod rejects_typed_without_assets_contract;
mod writes_definition_contract;
