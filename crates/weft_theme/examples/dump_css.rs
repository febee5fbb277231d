//! Theme CSS dump demo
//!
//! Builds the built-in theme registry, switches themes, and prints the
//! generated CSS custom properties on every switch.
//!
//! Run with: cargo run -p weft_theme --example dump_css

use weft_theme::{Breakpoint, ThemeError, ThemeStore};

fn main() -> Result<(), ThemeError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let store = ThemeStore::builtin();

    println!("registered themes:");
    for name in store.registry().names() {
        println!("  {name}");
    }

    println!("\nbreakpoint media queries:");
    for breakpoint in Breakpoint::ALL {
        println!("  {}: {}", breakpoint.label(), breakpoint.media_query());
    }

    // Fires once immediately with the default theme, then per select.
    let subscription = store.subscribe(|theme| {
        let declarations = theme.to_css_variables();
        println!("\n/* {} declarations */", declarations.lines().count());
        print!("{}", theme.to_css_root_rule());
    });

    store.select("midnight")?;

    // After unsubscribing, further selects print nothing.
    subscription.unsubscribe();
    store.select("default")?;

    Ok(())
}
