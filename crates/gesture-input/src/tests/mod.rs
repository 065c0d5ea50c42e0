mod detector_tests;
