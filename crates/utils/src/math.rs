//! Fonctions statistiques pour les rapports d'assemblage

/// Moyenne arithmétique (None si vide)
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Écart type de population (None si vide)
pub fn std_dev(values: &[f64]) -> Option<f64> {
    let mean = mean(values)?;
    let variance = values.iter().map(|&v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    Some(variance.sqrt())
}

/// Coefficient de corrélation de Pearson entre deux séries
///
/// None si les longueurs diffèrent, s'il y a moins de deux points, ou si une
/// des séries est constante.
pub fn pearson_correlation(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }

    let mean_x = mean(xs)?;
    let mean_y = mean(ys)?;

    let mut covariance = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (&x, &y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        covariance += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }

    Some(covariance / (var_x.sqrt() * var_y.sqrt()))
}

/// N50 : plus petite longueur L telle que les séquences de longueur >= L
/// couvrent au moins la moitié du total
pub fn n50(lengths: &[usize]) -> usize {
    let mut sorted = lengths.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    let total: usize = sorted.iter().sum();
    let mut acc = 0;
    for len in sorted {
        acc += len;
        if acc * 2 >= total {
            return len;
        }
    }
    0
}
