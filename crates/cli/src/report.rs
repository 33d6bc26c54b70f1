//! Console output.

use u_cutlist_core::{PackingResult, PartRequirement};

/// Prints the parts derived from the cabinets.
pub fn print_bill_of_materials(requirements: &[PartRequirement]) {
    println!("\nBill of Materials:");
    println!("{:-<60}", "");
    for req in requirements {
        println!(
            "  {:<32} {:>8.3} x {:<8.3} qty {}",
            req.label, req.length_a, req.length_b, req.quantity
        );
    }
}

/// Prints the sheet count and utilization.
pub fn print_summary(result: &PackingResult) {
    let summary = result.summary();
    println!("\nCut List Summary");
    println!("================");
    println!(
        "  Sheet size:      {} x {}",
        result.sheet.width, result.sheet.height
    );
    println!("  Sheets required: {}", summary.sheets_required);
    println!("  Parts placed:    {}", summary.parts_placed);
    println!("  Unplaced:        {}", summary.parts_unplaced);
    println!("  Utilization:     {:.1}%", summary.utilization_percent);
}

/// Prints every placement, sheet by sheet.
pub fn print_layout(result: &PackingResult) {
    for sheet in &result.sheets {
        println!(
            "\nSheet {} ({} parts, {:.1}% used)",
            sheet.index + 1,
            sheet.placements.len(),
            sheet.utilization(&result.sheet) * 100.0
        );
        println!("{:-<60}", "");
        for p in &sheet.placements {
            println!(
                "  {:<32} at ({:>7.3}, {:>7.3})  {:>7.3} x {:<7.3}",
                p.label, p.x, p.y, p.width, p.height
            );
        }
    }
}

/// Prints parts that could not be scheduled.
pub fn print_unplaced(result: &PackingResult) {
    if result.unplaced_errors.is_empty() {
        return;
    }
    println!("\nUnplaced Parts:");
    println!("{:-<60}", "");
    for unplaced in &result.unplaced_errors {
        println!(
            "  {:<32} {:<18} {}",
            unplaced.label,
            unplaced.reason(),
            unplaced.error
        );
    }
}
