use argot::{
    Cardinality, CommandParser, ConsoleInterface, DefaultFormat, ParseOutcome, Sequence,
    Specification,
};

fn main() {
    let mut items: Vec<u32> = Vec::default();

    let clp = CommandParser::new("summer");
    let parser = clp
        .add(
            Specification::positional(Sequence::new(&mut items, Cardinality::AtLeast(1)), "item")
                .help("The items to sum."),
        )
        .build()
        .expect("invalid CommandParser configuration");

    match parser.parse() {
        outcome @ ParseOutcome::Help(_) => {
            let _ = outcome.deliver(&DefaultFormat::terminal(), &ConsoleInterface::default());
            return;
        }
        outcome => {
            if let Err(code) =
                outcome.deliver(&DefaultFormat::terminal(), &ConsoleInterface::default())
            {
                std::process::exit(code);
            }
        }
    }

    let sum: u32 = items.iter().sum();
    println!("Sum: {sum}");
}
