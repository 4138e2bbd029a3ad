//! Text output: the full report or a line of selected values.

use std::fmt::Write;

use astrokit_cosmology::velocity_from_z;

use crate::pipeline::Prepared;
use crate::{CosmiccalOptions, Quantity};

const LABEL_WIDTH: usize = 52;

fn float_row(out: &mut String, label: &str, value: f64) {
    let _ = writeln!(out, " {label:<LABEL_WIDTH$}{value:.6}");
}

fn exp_row(out: &mut String, label: &str, value: f64) {
    let _ = writeln!(out, " {label:<LABEL_WIDTH$}{value:.6e}");
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n\n {title}\n {}", "-".repeat(title.len()));
}

/// Everything cosmiccal knows about the redshift, with descriptions.
pub fn render_report(opts: &CosmiccalOptions, prepared: &Prepared) -> String {
    let z = prepared.redshift;
    let cosmo = &prepared.cosmology;
    let age_now = cosmo.age(0.0);
    let age_z = cosmo.age(z);

    let mut out = String::new();
    let _ = writeln!(out, "cosmiccal {}", env!("CARGO_PKG_VERSION"));

    let _ = writeln!(out, "\n Input parameters\n ----------------");
    float_row(&mut out, "Desired redshift for calculations (z):", z);
    float_row(&mut out, "Expansion rate (Hubble constant, H0), now:", opts.h0);
    float_row(
        &mut out,
        "Cosmological constant fractional density, now:",
        opts.olambda,
    );
    float_row(&mut out, "Matter fractional density, now:", opts.omatter);
    exp_row(&mut out, "Radiation fractional density, now:", opts.oradiation);
    exp_row(
        &mut out,
        "Curvature fractional density (from the above):",
        cosmo.o_curvature(),
    );

    section(&mut out, "Universe now");
    float_row(&mut out, "Age of Universe now (Ga*):", age_now);
    exp_row(
        &mut out,
        "Critical density now (g/cm^3):",
        cosmo.critical_density(0.0),
    );
    float_row(&mut out, "Velocity at z (km/s):", velocity_from_z(z));
    float_row(&mut out, "Proper distance to z (Mpc):", cosmo.proper_distance(z));
    float_row(
        &mut out,
        "Angular diameter distance to z (Mpc):",
        cosmo.angular_distance(z),
    );
    float_row(
        &mut out,
        "Tangential distance covered by 1 arcsec at z (Kpc):",
        cosmo.arcsec_tangential_distance(z),
    );
    float_row(
        &mut out,
        "Luminosity distance to z (Mpc):",
        cosmo.luminosity_distance(z),
    );
    float_row(
        &mut out,
        "Distance modulus at z (no unit):",
        cosmo.distance_modulus(z),
    );
    float_row(
        &mut out,
        "Conversion to absolute magnitude (no unit):",
        cosmo.to_absolute_mag(z),
    );

    section(&mut out, "Universe at desired redshift z");
    float_row(&mut out, "Age of Universe at z (Ga*):", age_z);
    float_row(&mut out, "Look-back time to z (Ga*):", age_now - age_z);
    exp_row(&mut out, "Critical density at z (g/cm^3):", cosmo.critical_density(z));

    section(&mut out, "Comoving universe (time independent)");
    float_row(
        &mut out,
        "Comoving volume over 4pi stradian to z (Mpc^3):",
        cosmo.comoving_volume(z),
    );

    let _ = writeln!(out, "\n-------");
    let _ = writeln!(
        out,
        "*: Ga is short for Giga Annum, or billion years (IAU standard)."
    );
    out
}

fn quantity(prepared: &Prepared, which: Quantity) -> String {
    let z = prepared.redshift;
    let cosmo = &prepared.cosmology;
    match which {
        Quantity::UsedRedshift => format!("{z}"),
        Quantity::UsedVelocity => format!("{}", velocity_from_z(z)),
        Quantity::AgeNow => format!("{:.6}", cosmo.age(0.0)),
        Quantity::CriticalDensityNow => format!("{:.6e}", cosmo.critical_density(0.0)),
        Quantity::ProperDistance => format!("{:.6}", cosmo.proper_distance(z)),
        Quantity::AngularDimDist => format!("{:.6}", cosmo.angular_distance(z)),
        Quantity::ArcsecTanDist => format!("{:.6}", cosmo.arcsec_tangential_distance(z)),
        Quantity::LuminosityDist => format!("{:.6}", cosmo.luminosity_distance(z)),
        Quantity::DistanceModulus => format!("{:.6}", cosmo.distance_modulus(z)),
        Quantity::AbsMagConv => format!("{:.6}", cosmo.to_absolute_mag(z)),
        Quantity::Age => format!("{:.6}", cosmo.age(z)),
        Quantity::LookBackTime => format!("{:.6}", cosmo.look_back_time(z)),
        Quantity::CriticalDensity => format!("{:.6e}", cosmo.critical_density(z)),
        Quantity::Volume => format!("{:.6}", cosmo.comoving_volume(z)),
    }
}

/// The requested quantities, then the requested lines, on one line.
pub fn render_specific(opts: &CosmiccalOptions, prepared: &Prepared) -> String {
    let z = prepared.redshift;
    let values: Vec<String> = opts
        .quantities
        .iter()
        .map(|&which| quantity(prepared, which))
        .chain(opts.lines.iter().map(|rest| format!("{}", rest * (1.0 + z))))
        .collect();
    let mut out = values.join(" ");
    out.push('\n');
    out
}
