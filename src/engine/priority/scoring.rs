use crate::config::scoring_profile::{
    self, PriorityProfile,
};
use chrono::{DateTime, Utc};

pub(super) fn hemoglobin_points(profile: &PriorityProfile, hb: f64) -> f64 {
    scoring_profile::lower_band_points(&profile.hemoglobin_bands, hb)
}

/// 血压分档: 低血压档按序求值，未命中再判高血压档
pub(super) fn blood_pressure_points(profile: &PriorityProfile, sys: f64, dia: f64) -> f64 {
    for band in &profile.hypotension_bands {
        let dia_hit = band.dia_below.map_or(false, |below| dia < below);
        if sys < band.sys_below || dia_hit {
            return band.points;
        }
    }

    let ht = &profile.hypertension;
    if sys > ht.sys_above || dia > ht.dia_above {
        return ht.points;
    }

    0.0
}

pub(super) fn heart_rate_points(profile: &PriorityProfile, hr: f64) -> f64 {
    scoring_profile::range_band_points(&profile.heart_rate_bands, hr)
}

pub(super) fn age_band_points(profile: &PriorityProfile, age: i32) -> f64 {
    scoring_profile::age_points(&profile.age_rules, age)
}

/// 等待时长因子: min(max_points, 等待小时数 / 饱和小时数 × max_points)
///
/// 入科时间晚于 now 时按 0 小时处理（防御上游时钟偏移）
pub(super) fn wait_time_points(
    profile: &PriorityProfile,
    admitted_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> f64 {
    let rule = &profile.wait_time;
    let hours = ((now - admitted_at).num_seconds() as f64 / 3600.0).max(0.0);
    (hours / rule.saturation_hours * rule.max_points).min(rule.max_points)
}
