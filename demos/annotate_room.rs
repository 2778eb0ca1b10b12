//! End-to-end annotation planning walkthrough.
//!
//! Analyzes a 10×8 room with a door and a window, resolves a dimension
//! command given in millimetres, plans the dimension chains, then places
//! tags for a short row of doors where one preferred spot is taken.
//!
//! ```text
//! cargo run --example annotate_room
//! RUST_LOG=planmark=debug cargo run --example annotate_room
//! ```

use planmark::command::{AnnotationCommand, CommandParameters, Operation, TargetScope};
use planmark::geometry::{Aabb, BoundaryCurve, ElementId, OpeningKind, RawOpening};
use planmark::math::{Point3, Vector3};
use planmark::operations::{
    BoundaryAnalysis, DimensionPlan, ElementRef, TagPlacementBatch, TagPlacementParams,
    summarize_batch,
};

fn p(x: f64, y: f64) -> Point3 {
    Point3::new(x, y, 0.0)
}

fn main() -> planmark::Result<()> {
    // Default: WARN for everything, INFO for planmark.
    // Override with RUST_LOG (e.g. RUST_LOG=planmark=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("planmark=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // A 10×8 room, counter-clockwise, with a door in the south wall and
    // a window in the east wall.
    let curves = vec![
        BoundaryCurve::line(p(0.0, 0.0), p(10.0, 0.0)).with_element_id(ElementId(101)),
        BoundaryCurve::line(p(10.0, 0.0), p(10.0, 8.0)).with_element_id(ElementId(102)),
        BoundaryCurve::line(p(10.0, 8.0), p(0.0, 8.0)).with_element_id(ElementId(103)),
        BoundaryCurve::line(p(0.0, 8.0), p(0.0, 0.0)).with_element_id(ElementId(104)),
    ];
    let openings = vec![
        RawOpening::new(ElementId(501), OpeningKind::Door, p(5.0, 0.0), 3.0, 7.0),
        RawOpening::new(ElementId(502), OpeningKind::Window, p(10.0, 4.0), 2.0, 4.0),
    ];

    let boundary = BoundaryAnalysis::new(curves, openings).execute();
    println!(
        "analyzed boundary: {} segments, {} corners, {} openings, perimeter {:.2}",
        boundary.segments.len(),
        boundary.corners.len(),
        boundary.openings.len(),
        boundary.perimeter
    );
    for warning in &boundary.warnings {
        println!("  warning: {warning}");
    }

    // The upstream parser speaks millimetres; the firm standard offset
    // is 200 mm.
    let command = AnnotationCommand {
        operation: Operation::CreateDimensions,
        target: TargetScope {
            element_type: "room".to_owned(),
            filter_criteria: None,
            level_name: None,
        },
        parameters: CommandParameters {
            offset_mm: Some(200.0),
            style: Some("Continuous".to_owned()),
            ..CommandParameters::default()
        },
        clarifications: Vec::new(),
    };
    let params = command.dimension_parameters()?;

    let chains = DimensionPlan::new(&boundary, &params).execute();
    println!(
        "\nplanned {} dimension chains (offset {:.3}):",
        chains.len(),
        params.offset_distance()
    );
    for chain in &chains {
        println!(
            "  ({:5.1}, {:5.1}) → ({:5.1}, {:5.1})  {} references, {} opening edges",
            chain.segment.start.x,
            chain.segment.start.y,
            chain.segment.end.x,
            chain.segment.end.y,
            chain.reference_points.len(),
            chain.opening_indices.len()
        );
    }

    // Tag three doors along a corridor. An existing annotation sits on
    // the second door's preferred spot, forcing a fallback position.
    let elements: Vec<ElementRef> = (0..3)
        .map(|i| {
            let x = f64::from(i) * 6.0;
            ElementRef::from_bounds(
                ElementId(601 + i64::from(i)),
                Aabb::from_center_half_extents(p(x, 0.0), 0.5, 0.5, 0.5),
            )
        })
        .collect();
    let existing = vec![Aabb::from_center_half_extents(p(6.0, 1.5), 1.0, 0.5, 0.5)];

    let tag_params = TagPlacementParams::new(1.2, 0.6, Vector3::new(0.0, 1.5, 0.0))?;
    let result = TagPlacementBatch::new(elements, existing, tag_params).execute();

    println!("\ntag placements:");
    for placement in &result.placements {
        if placement.is_success {
            println!(
                "  element {}: ({:5.2}, {:5.2}) after {} attempt(s){}",
                placement.element_id,
                placement.location.x,
                placement.location.y,
                placement.attempt_count,
                if placement.has_leader { ", with leader" } else { "" }
            );
        } else {
            println!(
                "  element {}: failed ({})",
                placement.element_id,
                placement.failure_reason.as_deref().unwrap_or("unknown")
            );
        }
    }
    println!("{}", summarize_batch(&result.placements, "door"));

    Ok(())
}
