//! Person Report Sample Application
//!
//! A small console program demonstrating funcol's `OrderedCollection`:
//! filtering, sorting, limiting, signed indexing, wraparound slicing,
//! and the print helpers, all over a roster of people.

use std::io::{self, Write};

use funcol::collection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone)]
struct Person {
    name: String,
    last_name: String,
    age: u32,
    gender: Gender,
}

impl Person {
    fn new(name: &str, last_name: &str, age: u32, gender: Gender) -> Self {
        Self {
            name: name.to_string(),
            last_name: last_name.to_string(),
            age,
            gender,
        }
    }

    fn describe(&self) -> String {
        format!("{} {}, age {}", self.name, self.last_name, self.age)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let roster = collection![
        Person::new("David", "Ross", 28, Gender::Male),
        Person::new("Helen", "Kay", 27, Gender::Female),
        Person::new("Arthur", "Pace", 20, Gender::Male),
        Person::new("Joseph", "Prime", 25, Gender::Male),
        Person::new("Elder", "Stone", 95, Gender::Male),
        Person::new("Agatha", "Stone", 92, Gender::Female),
    ];

    let mut stdout = io::stdout();

    // Men sorted by age, oldest first, capped well above the roster size
    // so the whole result survives the cut
    writeln!(stdout, "Men, oldest first:")?;
    roster
        .filter(|person| person.gender == Gender::Male)
        .sort_by(|left, right| right.age.cmp(&left.age))
        .limit_to(300)
        .for_each(|person| println!("  {}", person.describe()));

    // Every age in the roster, descending
    write!(stdout, "\nAll ages, descending: ")?;
    roster.map(|person| person.age).sort(true).print(
        &mut stdout,
        "{",
        ", ",
        "}\n",
    )?;

    // Signed indexing reaches the latest addition directly
    let newest = roster.get(-1)?;
    writeln!(stdout, "\nMost recently added: {}", newest.describe())?;

    // A backward full-range slice lists everyone in reverse insertion order
    writeln!(stdout, "\nReverse insertion order:")?;
    roster
        .slice(&[-1, 0, -1])?
        .print_by(&mut stdout, |person| format!("  {}", person.describe()), "", "\n", "\n")?;

    // Women sorted by age, oldest first
    writeln!(stdout, "Women, oldest first:")?;
    roster
        .filter(|person| person.gender == Gender::Female)
        .sort_by(|left, right| right.age.cmp(&left.age))
        .for_each(|person| println!("  {}", person.describe()));

    Ok(())
}
