mod command_result_tests;
mod init_cmd_tests;
mod logging_tests;
mod utils;
