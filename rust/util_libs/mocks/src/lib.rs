pub mod mongodb_runner;
