pub mod seed_reader;
