mod lookup_test;
mod verification_test;
