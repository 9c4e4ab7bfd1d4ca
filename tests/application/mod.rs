mod simulator_sessions_test;
