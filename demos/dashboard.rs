//! Drives the dashboard core from the terminal against a tiny inline dataset:
//! selects a product, prints the summary tables and series, and steps
//! through the narratives.

use injury_explorer::{AxisMode, Dashboard, InMemoryDataset};

const DATA: &str = r#"{
    "records": [
        {
            "treatment_date": "2017-01-01", "age": 71, "sex": "male",
            "race": "white", "body_part": "head", "location": "home",
            "diagnosis": "internal organ injury", "product_code": 1842,
            "weight": 74.7, "narrative": "71YOM FELL ON STAIRS SUSTAINED CHI"
        },
        {
            "treatment_date": "2017-01-03", "age": 30, "sex": "female",
            "race": "white", "body_part": "ankle", "location": "home",
            "diagnosis": "strain, sprain", "product_code": 1842,
            "weight": 81.3, "narrative": "30YOF TWISTED ANKLE ON STAIRS"
        },
        {
            "treatment_date": "2017-01-05", "age": 45, "sex": "female",
            "race": "black", "body_part": "head", "location": "home",
            "diagnosis": "contusion", "product_code": 649,
            "weight": 92.1, "narrative": "45YOF HIT HEAD ON TOILET LID"
        }
    ],
    "population": [
        { "age": 30, "sex": "female", "population": 2000000 },
        { "age": 71, "sex": "male", "population": 1100000 }
    ],
    "products": [
        { "code": 1842, "title": "stairs or steps" },
        { "code": 649, "title": "toilets" }
    ]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dataset = InMemoryDataset::from_json_str(DATA)?;
    let mut dashboard = Dashboard::builder().source(dataset).build()?;

    dashboard.select_product_by_title("stairs or steps");
    dashboard.set_axis(AxisMode::Rate);

    let snapshot = dashboard.snapshot();
    println!(
        "{} ({} records)",
        snapshot.product_title.as_deref().unwrap_or("<none>"),
        snapshot.selection_size
    );

    println!("\ndiagnosis:");
    for row in &snapshot.summaries.diagnosis {
        println!("  {:<24} {:>10.1}", row.category, row.weighted_count);
    }

    println!("\ninjuries per 10,000 people:");
    for point in &snapshot.series {
        match point.value {
            Some(value) => println!("  age {:>3} {:<7} {:>8.3}", point.age, point.sex, value),
            None => println!("  age {:>3} {:<7} {:>8}", point.age, point.sex, "n/a"),
        }
    }

    println!("\nnarratives:");
    for _ in 0..snapshot.selection_size {
        if let Some(narrative) = dashboard.narrative() {
            println!("  {narrative}");
        }
        dashboard.next_narrative();
    }

    Ok(())
}
