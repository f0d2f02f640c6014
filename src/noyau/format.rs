// src/noyau/format.rs

use super::nombre::Nombre;

/// Nombre de chiffres après la virgule avant nettoyage.
pub const CHIFFRES_FRACTION: usize = 10;

/// Affichage d’un résultat:
/// - entier : tous les chiffres, pas de point
/// - réel   : 10 décimales, puis on retire les zéros finaux, puis un '.' final
///   (3.1000000000 -> 3.1 ; 4.0000000000 -> 4)
pub fn format_nombre(n: &Nombre) -> String {
    match n {
        Nombre::Entier(e) => e.to_string(),
        Nombre::Reel(x) => format_reel(*x),
    }
}

fn format_reel(x: f64) -> String {
    let brut = format!("{x:.prec$}", prec = CHIFFRES_FRACTION);

    // `{:.N}` met toujours un point : on peut retirer les zéros sans toucher à la partie entière
    let s = brut.trim_end_matches('0');
    // le signe d’un zéro négatif (ou d’un minuscule négatif) est conservé : "-0"
    s.strip_suffix('.').unwrap_or(s).to_string()
}
