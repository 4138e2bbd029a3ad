use astrokit_cosmology::codes::{LAMBDA_OUT_OF_BOUNDS, SUM_LIMIT, VELOCITY_OUT_OF_BOUNDS};
use astrokit_cosmology::{Cosmology, z_from_velocity};
use astrokit_error::{ChainOrder, ErrorChain};
use pretty_assertions::assert_eq;

#[test]
fn failures_accumulate_without_stopping() {
    let mut chain = ErrorChain::new();

    let z = z_from_velocity(5e5, &mut chain);
    chain.add_front_msg("converting --velocity", false);

    let cosmo = Cosmology::new(70.0, 1.5, 0.3, 0.0, &mut chain);
    chain.add_front_msg("checking cosmology", false);

    // Both calls returned something and the chain kept every record.
    assert!(z.is_nan());
    assert_eq!(cosmo.o_lambda(), 1.5);
    assert!(cosmo.o_curvature() < 0.0);
    assert_eq!(chain.len(), 3);
    assert!(chain.check(VELOCITY_OUT_OF_BOUNDS));
    assert!(chain.check(LAMBDA_OUT_OF_BOUNDS));
    assert!(chain.check(SUM_LIMIT));

    chain.reverse();
    assert_eq!(chain.order(), ChainOrder::Chronological);

    let fronts: Vec<Option<&str>> = chain.iter().map(|r| r.front_msg()).collect();
    assert_eq!(fronts, [Some("converting --velocity"), None, Some("checking cosmology")]);
    assert_eq!(chain.critical_count(), 3);
}

#[test]
fn rendered_lines_name_the_library() {
    let mut chain = ErrorChain::new();
    Cosmology::new(70.0, 0.7, 0.3, 0.5, &mut chain);

    let mut out = Vec::new();
    assert_eq!(chain.write_to(&mut out, false).unwrap(), 1);
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("cosmology.h: 4: Cosmology::new: sum of fractional densities is not 1"));
    assert!(text.trim_end().ends_with("[BREAKING]"));
}
