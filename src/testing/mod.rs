pub mod random_names;
