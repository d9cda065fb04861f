//! Demonstrates loading the vocabulary and listing its namespaces.
//!
//! Run with: `cargo run --example dump_vocabulary -p motion-spec-ontology`

use motion_spec_ontology::{Vocabulary, VelocityVectorType};

fn main() {
    let vocabulary = Vocabulary::full();

    println!("Motion specification vocabulary v{}", vocabulary.version);
    println!("  Namespaces:   {}", vocabulary.namespaces.len());
    println!("  Classes:      {}", vocabulary.class_count());
    println!("  Properties:   {}", vocabulary.property_count());
    println!();

    for module in &vocabulary.namespaces {
        let ns = &module.namespace;
        println!(
            "  {:16} {:66} {:>2} classes, {:>2} properties",
            ns.prefix,
            ns.iri,
            module.classes.len(),
            module.properties.len(),
        );
    }

    println!();
    println!("Velocity vector types:");
    for vt in VelocityVectorType::ALL {
        println!(
            "  {:28} {}",
            motion_spec_ontology::model::local_name(vt.iri()),
            vt.direction()
        );
    }
}
