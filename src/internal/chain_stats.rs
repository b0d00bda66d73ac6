#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::indexing_slicing)]

//! Measures how chains form in `HashTable` under different load factors and
//! renders the results as PNG charts.

use std::error::Error;

use chainmap::HashTable;
use log::{LevelFilter, info};
use plotters::prelude::*;
use rand::Rng;

const KEY_COUNT: usize = 100_000;
const KEY_LENGTH: usize = 12;
const INITIAL_CAPACITY: usize = 16;
const LOAD_FACTORS: [f64; 8] = [0.25, 0.5, 0.75, 1.0, 1.5, 2.0, 3.0, 4.0];

const COLORS: [RGBColor; 2] = [
    RGBColor(220, 50, 50), // Bright red
    RGBColor(50, 90, 220), // Bright blue
];
const FONT_FAMILY: &str = "sans-serif";

/// Chain statistics of one fully loaded table
#[derive(Debug, Clone, Copy)]
struct ChainReport {
    load_factor: f64,
    capacity: usize,
    growths: usize,
    mean_chain: f64,
    longest_chain: usize,
    empty_ratio: f64,
}

fn random_keys(count: usize) -> Vec<String> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| (0..KEY_LENGTH).map(|_| char::from(rng.random_range(b'a'..=b'z'))).collect())
        .collect()
}

fn sequential_keys(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("key{i}")).collect()
}

fn measure(keys: &[String], load_factor: f64) -> Result<ChainReport, Box<dyn Error>> {
    let mut table = HashTable::with_capacity_and_load_factor(INITIAL_CAPACITY, load_factor)?;
    let mut growths = 0;

    for (i, key) in keys.iter().enumerate() {
        let before = table.capacity();
        table.set(key.as_str(), i);
        if table.capacity() != before {
            growths += 1;
        }
    }

    let lengths = table.chain_lengths();
    let occupied = lengths.iter().filter(|&&len| len > 0).count();
    let longest_chain = lengths.iter().copied().max().unwrap_or(0);
    let mean_chain = if occupied == 0 { 0.0 } else { table.len() as f64 / occupied as f64 };
    let empty_ratio = (lengths.len() - occupied) as f64 / lengths.len() as f64;

    Ok(ChainReport {
        load_factor,
        capacity: table.capacity(),
        growths,
        mean_chain,
        longest_chain,
        empty_ratio,
    })
}

fn plot(
    path: &str,
    title: &str,
    y_desc: &str,
    series: &[(&str, Vec<(f64, f64)>)],
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_x = LOAD_FACTORS.iter().copied().fold(0.0, f64::max);
    let max_y = series
        .iter()
        .flat_map(|(_, points)| points.iter().map(|&(_, y)| y))
        .fold(0.0, f64::max)
        .max(1.0) *
        1.1; // Add 10% margin

    let mut chart = ChartBuilder::on(&root)
        .caption(title, (FONT_FAMILY, 35))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..max_x, 0.0..max_y)?;

    chart
        .configure_mesh()
        .x_desc("Load factor")
        .y_desc(y_desc)
        .axis_desc_style((FONT_FAMILY, 16))
        .draw()?;

    for (idx, (name, points)) in series.iter().enumerate() {
        let color = COLORS[idx % COLORS.len()];
        let line_style = ShapeStyle::from(&color).stroke_width(2);

        chart
            .draw_series(LineSeries::new(points.iter().copied(), line_style))?
            .label(*name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        chart.draw_series(points.iter().map(|&point| Circle::new(point, 4, color.filled())))?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::new().filter_level(LevelFilter::Info).parse_default_env().init();

    let key_sets =
        [("Random keys", random_keys(KEY_COUNT)), ("Sequential keys", sequential_keys(KEY_COUNT))];

    let mut mean_series = Vec::new();
    let mut longest_series = Vec::new();

    for (name, keys) in &key_sets {
        info!("Inserting {} {}", keys.len(), name.to_lowercase());

        let mut means = Vec::with_capacity(LOAD_FACTORS.len());
        let mut longest = Vec::with_capacity(LOAD_FACTORS.len());
        for &load_factor in &LOAD_FACTORS {
            let report = measure(keys, load_factor)?;
            info!(
                "  load factor {:.2}: {} buckets after {} growths, mean chain {:.2}, longest {}, {:.1}% empty",
                report.load_factor,
                report.capacity,
                report.growths,
                report.mean_chain,
                report.longest_chain,
                report.empty_ratio * 100.0
            );
            means.push((report.load_factor, report.mean_chain));
            longest.push((report.load_factor, report.longest_chain as f64));
        }

        mean_series.push((*name, means));
        longest_series.push((*name, longest));
    }

    plot(
        "mean_chain_length.png",
        "Mean Length of Occupied Chains",
        "Entries per occupied bucket",
        &mean_series,
    )?;
    plot("longest_chain.png", "Longest Chain", "Entries in the longest bucket", &longest_series)?;

    info!("Generated plot images: mean_chain_length.png, longest_chain.png");

    Ok(())
}
