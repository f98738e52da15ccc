use anyhow::Result;
use cc_core::{ElementCategory, ElementType};

pub fn handle() -> Result<()> {
    for category in ElementCategory::ALL {
        println!("{}:", category.label());
        for element_type in ElementType::ALL
            .into_iter()
            .filter(|element_type| element_type.category() == category)
        {
            println!(
                "  {:<16} {:<16} {}",
                element_type.as_str(),
                element_type.label(),
                element_type.description()
            );
        }
    }
    Ok(())
}
