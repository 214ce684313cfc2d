use router::{driver, parse, write, CostModel};

const INPUT: &str = "\
5x5
OBS (2,0)
OBS (2,1)
OBS (2,3)
OBS (2,4)
A (1,0,2) (1,4,2)
B (1,0,0) (1,4,4)
";

fn main() {
    let problem = parse::parse_str(INPUT).expect("demo input is well-formed");
    let result = driver::route(&problem, &CostModel::default());

    println!(
        "routed {} of {} nets",
        result.routed_count(),
        problem.nets.len()
    );
    print!("{}", write::render(&result));

    for name in &result.failures {
        println!("# unroutable: {name}");
    }
}
