use argot::derive::*;
use argot::*;

#[test]
fn builder_compiles() {
    CommandParser::new("organization");
}

#[derive(Default, ArgotOptions)]
struct Boo {
    asdf: Option<usize>,
    a: usize,
}

#[test]
#[ignore]
fn derive_compiles() {
    Boo::parse();
}
