use argot::{
    CommandParser, ConsoleInterface, DefaultFormat, Names, Scalar, Specification, SplitGrammar,
};

fn main() {
    let mut retries: u32 = 0;
    let mut payload = String::default();

    let clp = CommandParser::new("send");
    let parser = clp
        .add(Specification::option(
            Scalar::new(&mut retries).default(1),
            Names::long("retries"),
        ))
        .add(Specification::positional(Scalar::new(&mut payload), "payload"))
        .build()
        .expect("invalid CommandParser configuration");

    let outcome = parser
        .parse_line(SplitGrammar::Escaped, r#"--retries 3 "my payload.txt""#)
        .expect("command line must split");

    if let Err(code) = outcome.deliver(&DefaultFormat::terminal(), &ConsoleInterface::default()) {
        std::process::exit(code);
    }

    println!("retries: {retries}, payload: {payload}");
}
