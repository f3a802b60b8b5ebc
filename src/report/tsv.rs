use crate::report::SelectionReport;
use std::fmt::Write;

pub const TSV_HEADER: &str = "Order\tDomain_ID\tClass\tLength\tMax_Identity_to_Set";

pub fn generate_tsv_report(report: &SelectionReport) -> String {
    let mut output = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(&mut output, "{}", TSV_HEADER);
    for row in &report.rows {
        let _ = writeln!(
            &mut output,
            "{}\t{}\t{}\t{}\t{:.4}",
            row.order, row.domain_id, row.class, row.length, row.max_identity_to_set
        );
    }

    output
}
