mod system_tests;
