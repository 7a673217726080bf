//! Serialization of search results and settings.

use crate::calc::common::interval;
use astro_float::BigFloat;
use astro_float_calc::{
    Ball, Block, BlockStatus, Calc, ConvergenceCertificate, Polynomial, SearchLimits, Status,
};

#[test]
fn calc_serde_blocks() {
    let calc = Calc::default();
    let f = Polynomial::from_i64(&[-6, 11, -6, 1]);

    let blocks = calc.isolate_roots(&f, &mut (), &interval(0.0, 5.0), &SearchLimits::default(), 64);
    assert_eq!(blocks.iter().filter(|b| b.is_isolated()).count(), 3);

    let json = serde_json::to_string(&blocks).unwrap();
    assert!(json.contains("\"IsolatedZero\""));
    assert!(json.contains("\"NoZero\""));

    let restored: Vec<Block> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, blocks);
}

#[test]
fn calc_serde_values() {
    let ball = interval(1.0, 2.0);
    let json = serde_json::to_string(&ball).unwrap();
    let restored: Ball = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, ball);
    assert_eq!(restored.mid(), &BigFloat::from_f64(1.5, 64));
    assert_eq!(restored.rad(), &BigFloat::from_f64(0.5, 64));

    let cert = ConvergenceCertificate {
        factor: BigFloat::from_f64(0.625, 64),
        region: interval(1.0, 2.0),
    };
    let json = serde_json::to_string(&cert).unwrap();
    let restored: ConvergenceCertificate = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, cert);
    assert!(restored.is_finite());

    for status in [Status::Success, Status::ImpreciseInput, Status::NoConvergence] {
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(serde_json::from_str::<Status>(&json).unwrap(), status);
    }
    assert_eq!(serde_json::to_string(&Status::NoConvergence).unwrap(), "\"NoConvergence\"");

    let block = Block {
        ball: interval(0.25, 0.5),
        status: BlockStatus::Unknown,
        depth: 7,
    };
    let json = serde_json::to_string(&block).unwrap();
    assert_eq!(serde_json::from_str::<Block>(&json).unwrap(), block);
}

#[test]
fn calc_serde_limits() {
    let limits = SearchLimits::new(12, 345, 6);
    let json = serde_json::to_string(&limits).unwrap();
    assert_eq!(json, r#"{"max_depth":12,"max_eval":345,"max_found":6}"#);

    let restored: SearchLimits = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, limits);

    let restored: SearchLimits =
        serde_json::from_str(r#"{"max_depth":30,"max_eval":100000,"max_found":100000}"#).unwrap();
    assert_eq!(restored, SearchLimits::default());
}

#[test]
fn calc_serde_invalid_radius() {
    assert!(serde_json::from_str::<Ball>(r#"{"mid":"0.0","rad":"-1.0"}"#).is_err());
    assert!(serde_json::from_str::<Ball>(r#"{"mid":0.0,"rad":-1.0}"#).is_err());
    assert!(serde_json::from_str::<Ball>(r#"{"mid":"1.0","rad":"NaN"}"#).is_err());

    let ball: Ball = serde_json::from_str(r#"{"mid":"1.5","rad":"0.25"}"#).unwrap();
    assert!(ball.is_positive());
    assert_eq!(ball.rad(), &BigFloat::from_f64(0.25, 64));
    assert_eq!(ball.lower(), BigFloat::from_f64(1.25, 64));

    let ball: Ball = serde_json::from_str(r#"{"mid":0.0,"rad":0.0}"#).unwrap();
    assert!(ball.is_exact());
    assert_eq!(ball.sign(), 0);
}
