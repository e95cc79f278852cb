//! Solves the same cubic with all three strategies and prints the results the
//! way a front-end would show them.
//!
//! Newton needs a starting point and bisection needs an interval where the
//! polynomial changes sign; the algebraic method needs neither and returns
//! every root, complex ones included.

use low_poly::{complex, Cubic, Equation, Method};

fn main() -> anyhow::Result<()> {
    let _ = simple_logger::init_with_level(log::Level::Info);

    // x^3 - x - 2, one real root near 1.52 and a complex pair
    let eq = Equation::from(Cubic::new(1.0, 0.0, -1.0, -2.0));
    let epsilon = 1E-8;
    let decimal_places = 6;

    let methods = [
        ("Algebraic", Method::Algebraic),
        ("Newton", Method::newton(complex!(1.0), epsilon)),
        ("Bisection", Method::bisection(1.0, 2.0, epsilon)),
    ];

    println!("{eq} = 0");
    for (name, method) in methods {
        let solution = eq.solve(&method)?;
        println!("\n{name}:");
        println!("{}", solution.report(decimal_places, method.is_iterative()));
    }

    // an interval without a sign change is reported, not retried
    if let Err(e) = eq.solve(&Method::bisection(3.0, 4.0, epsilon)) {
        log::warn!("bisection on [3, 4]: {e}");
    }
    Ok(())
}
