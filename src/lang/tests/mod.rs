mod line_test;
