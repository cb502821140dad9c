use argot::derive::*;
use argot::*;

#[derive(Debug, Default, ArgotOptions)]
#[argot(program = "demo_derived")]
struct Parameters {
    apple: usize,
    banana: bool,
    carrots: Vec<u32>,
    #[argot(short = 'd')]
    daikon_root: Option<String>,
}

fn main() {
    let parameters = Parameters::parse();
    println!("{parameters:?}");
}
