mod random_source_test;
