mod channelname_tests;
mod user_tests;
