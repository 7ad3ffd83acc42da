pub const ADDRESSES_FILE_PATH: &str = "data/addresses.txt";

pub const TRANSACTIONS_FILE_PATH: &str = "data/transactions.json";
