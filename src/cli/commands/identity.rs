use crate::bio::alignment::{IdentityScoring, NeedlemanWunsch};
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct IdentityArgs {
    /// First residue string
    #[arg(value_name = "SEQ_A")]
    pub seq_a: String,

    /// Second residue string
    #[arg(value_name = "SEQ_B")]
    pub seq_b: String,

    /// Print the alignment used for the score
    #[arg(long)]
    pub show_alignment: bool,
}

fn normalize(residues: &str) -> Vec<u8> {
    residues
        .bytes()
        .filter(|c| !c.is_ascii_whitespace())
        .collect()
}

pub fn run(args: IdentityArgs) -> anyhow::Result<()> {
    let a = normalize(&args.seq_a);
    let b = normalize(&args.seq_b);

    if a.is_empty() || b.is_empty() {
        println!("{:.4}", 0.0);
        return Ok(());
    }

    let alignment = NeedlemanWunsch::new(IdentityScoring::new()).align(&a, &b);
    println!("{:.4}", alignment.identity);

    if args.show_alignment {
        println!("{}", String::from_utf8_lossy(&alignment.a_aligned));
        println!("{}", String::from_utf8_lossy(&alignment.alignment_string));
        println!("{}", String::from_utf8_lossy(&alignment.b_aligned));
        println!(
            "matches={} aligned_length={}",
            alignment.matches, alignment.aligned_length
        );
    }

    Ok(())
}
