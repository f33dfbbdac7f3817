pub mod catch_environment;
