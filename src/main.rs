use ecc::{FieldElement, FieldError, PrimeField};

fn main() {
    env_logger::init();

    println!("=== Finite Field Elements ===\n");

    if let Err(e) = demo_prime_field() {
        eprintln!("demo failed: {}", e);
        std::process::exit(1);
    }
    demo_errors();
}

/// Demonstrate addition and subtraction in F_13 and F_57
fn demo_prime_field() -> Result<(), FieldError> {
    println!("--- Prime Field Arithmetic ---");

    let f13 = PrimeField::new(13);
    println!("Working in {}", f13);

    let a = f13.element(7)?;
    let b = f13.element(12)?;
    println!("\na = {}", a);
    println!("b = {}", b);

    // 7 + 12 = 19 ≡ 6 (mod 13)
    println!("\na + b = {}", (a + b)?);
    // 7 - 12 = -5 ≡ 8 (mod 13)
    println!("a - b = {}", (a - b)?);
    println!("b - a = {}", (b - a)?);

    let c = FieldElement::new(9, 57)?;
    let d = FieldElement::new(29, 57)?;
    println!("\nWorking in {}", c.field());
    println!("{} - {} = {} (wraps around)", c, d, (c - d)?);

    println!("\nElements of F_5:");
    for e in PrimeField::new(5).elements() {
        print!("{} ", e);
    }
    println!("\n");

    Ok(())
}

/// Demonstrate the two rejected cases
fn demo_errors() {
    println!("--- Rejected Operations ---");

    match FieldElement::new(13, 13) {
        Ok(e) => println!("unexpected element {}", e),
        Err(e) => println!("FieldElement::new(13, 13): {}", e),
    }

    match FieldElement::new(-1, 13) {
        Ok(e) => println!("unexpected element {}", e),
        Err(e) => println!("FieldElement::new(-1, 13): {}", e),
    }

    if let (Ok(x), Ok(y)) = (FieldElement::new(1, 2), FieldElement::new(1, 3)) {
        if let Err(e) = x + y {
            println!("{} + {}: {}", x, y, e);
        }
        if let Err(e) = x - y {
            println!("{} - {}: {}", x, y, e);
        }
    }
}
