//! Affichage des statistiques d'assemblage

use asm_core::{AssemblyResult, Termination};
use asm_simulation::{MetricsCollector, RunMetrics};
use asm_utils::n50;
use console::style;
use tabled::{Table, Tabled};

fn termination_label(termination: Termination) -> &'static str {
    match termination {
        Termination::PoolExhausted => "pool épuisé",
        Termination::NoQualifyingOverlap => "aucun chevauchement",
        Termination::IterationLimit => "limite d'itérations",
    }
}

/// Affiche le résultat d'un assemblage
pub fn display_assembly(result: &AssemblyResult, elapsed_ms: f64) {
    let appended: Vec<usize> = result.steps.iter().map(|s| s.appended_len).collect();

    println!("\n┌────────────────────────────────────────────────┐");
    println!("│ Assemblage                                     │");
    println!("├────────────────────────────────────────────────┤");
    println!("│ Reconstruction         : {:>10} bases      │", result.reconstruction.len());
    println!("│ GC                     : {:>10.2}%           │", result.reconstruction.gc_content());
    println!("│ Fragments utilisés     : {:>10}            │", result.used_count);
    println!("│ Fragments inutilisés   : {:>10}            │", result.unused_count());
    println!("│ Itérations             : {:>10}            │", result.iterations);
    println!("│ N50 des ajouts         : {:>10} bases      │", n50(&appended));
    println!("│ Durée                  : {:>10.2} ms         │", elapsed_ms);
    println!("└────────────────────────────────────────────────┘");
    println!("SHA-256 : {}", result.reconstruction.checksum());
    println!("Arrêt : {}", termination_label(result.termination));
}

/// Affiche une ligne par génome
pub fn display_runs(runs: &[RunMetrics]) {
    #[derive(Tabled)]
    struct RunRow {
        #[tabled(rename = "Genome")]
        name: String,
        #[tabled(rename = "Length")]
        length: usize,
        #[tabled(rename = "GC%")]
        gc_percent: String,
        #[tabled(rename = "Used")]
        used: String,
        #[tabled(rename = "Iterations")]
        iterations: usize,
        #[tabled(rename = "Recovered")]
        recovered: String,
        #[tabled(rename = "Time (ms)")]
        elapsed: String,
    }

    if runs.is_empty() {
        println!("Aucune exécution à afficher");
        return;
    }

    let rows: Vec<RunRow> = runs
        .iter()
        .map(|run| RunRow {
            name: run.name.clone(),
            length: run.source_length,
            gc_percent: format!("{:.2}", run.gc_percent),
            used: format!("{}/{}", run.used_count, run.fragments),
            iterations: run.iterations,
            recovered: format!("{:.1}%", run.recovered_fraction * 100.0),
            elapsed: format!("{:.2}", run.elapsed_ms),
        })
        .collect();

    println!();
    println!("{}", Table::new(rows));
}

/// Affiche les agrégats du benchmark
pub fn display_summary(collector: &MetricsCollector) {
    println!("\n📈 Statistiques agrégées:");

    if let Some(average) = collector.average_elapsed_ms() {
        println!("   Durée moyenne      : {:.2} ms", average);
    }
    if let Some(spread) = collector.elapsed_std_dev_ms() {
        println!("   Écart type durée   : {:.2} ms", spread);
    }
    if let (Some(fastest), Some(slowest)) = (collector.fastest(), collector.slowest()) {
        println!("   Plus rapide        : {} ({:.2} ms)", fastest.name, fastest.elapsed_ms);
        println!("   Plus lent          : {} ({:.2} ms)", slowest.name, slowest.elapsed_ms);
    }
    if let Some(fraction) = collector.average_recovered_fraction() {
        println!("   Reconstruction moy.: {:.1}%", fraction * 100.0);
    }

    match collector.gc_time_correlation() {
        Some(r) => println!("   Corrélation GC%/durée (Pearson): {}", style(format!("{:+.3}", r)).bold()),
        None => println!("   Corrélation GC%/durée: {}", style("indéfinie (moins de 2 génomes ou série constante)").dim()),
    }
}
