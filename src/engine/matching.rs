// ==========================================
// 血库管理系统 - 供血者匹配引擎
// ==========================================
// 职责: 按血型相容矩阵过滤候选供血者，加和评分取前 5
// 输入: 目标受血者 + 候选供血者列表
// 输出: 匹配结果（供血者 + 分数 + 有序匹配理由）
// 红线: 同分保持输入顺序（稳定排序）；捐献间隔只影响加分，不做排除
// ==========================================

use crate::config::compatibility::CompatibilityMatrix;
use crate::config::scoring_profile::MatchProfile;
use crate::domain::donor::Donor;
use crate::domain::recipient::Recipient;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

// ==========================================
// 匹配理由（可解释性输出）
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchReason {
    ExactTypeMatch,
    CompatibleType,
    EligibleDonationWindow,
    FirstTimeDonor,
    ExperiencedDonor,
    PreviousDonor,
    AvailableForContact,
}

impl fmt::Display for MatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchReason::ExactTypeMatch => write!(f, "Exact blood type match"),
            MatchReason::CompatibleType => write!(f, "Compatible blood type"),
            MatchReason::EligibleDonationWindow => write!(f, "Eligible donation window"),
            MatchReason::FirstTimeDonor => write!(f, "First-time donor"),
            MatchReason::ExperiencedDonor => write!(f, "Experienced donor"),
            MatchReason::PreviousDonor => write!(f, "Previous donor"),
            MatchReason::AvailableForContact => write!(f, "Available for contact"),
        }
    }
}

/// 单个供血者的匹配结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonorMatch {
    pub donor: Donor,
    pub score: i32,
    pub reasons: Vec<MatchReason>,
}

// ==========================================
// DonorMatcher - 供血者匹配引擎
// ==========================================
pub struct DonorMatcher {
    profile: MatchProfile,
    matrix: CompatibilityMatrix,
}

impl DonorMatcher {
    /// 以规范配置构造引擎
    pub fn new() -> Self {
        Self {
            profile: MatchProfile::default(),
            matrix: CompatibilityMatrix::new(),
        }
    }

    /// 以自定义配置构造引擎
    pub fn with_profile(profile: MatchProfile, matrix: CompatibilityMatrix) -> Self {
        Self { profile, matrix }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 为受血者匹配供血者
    ///
    /// 过滤: is_eligible = true 且相容矩阵允许供血
    /// 评分（独立加和，clamp 100）:
    /// 1) 同型 +50 / 异型相容 +30
    /// 2) 无捐献记录 +15（首次）/ 距上次捐献 >56 天 +20 / 窗口内 +0（仍参与排名）
    /// 3) 累计捐献 >5 次 +15 / >0 次 +10
    /// 4) 可联系 +15（固定项）
    ///
    /// # 参数
    /// - `recipient`: 目标受血者
    /// - `donors`: 候选供血者列表
    /// - `today`: 当前日期（由调用方时钟注入，捐献间隔基准）
    ///
    /// # 返回
    /// 按分数降序的前 5 个匹配；同分保持输入顺序
    #[instrument(skip(self, recipient, donors), fields(
        recipient_id = %recipient.recipient_id,
        blood_type = %recipient.blood_type,
        candidates = donors.len()
    ))]
    pub fn match_donors(
        &self,
        recipient: &Recipient,
        donors: &[Donor],
        today: NaiveDate,
    ) -> Vec<DonorMatch> {
        let mut matches: Vec<DonorMatch> = donors
            .iter()
            .filter(|donor| donor.is_eligible)
            .filter(|donor| self.matrix.can_supply(donor.blood_type, recipient.blood_type))
            .map(|donor| self.score_donor(donor, recipient, today))
            .collect();

        // Vec::sort_by 为稳定排序，同分保持输入顺序
        matches.sort_by(|a, b| b.score.cmp(&a.score));
        matches.truncate(self.profile.max_results);
        matches
    }

    // ==========================================
    // 评分方法
    // ==========================================

    /// 对单个已通过过滤的供血者评分
    fn score_donor(&self, donor: &Donor, recipient: &Recipient, today: NaiveDate) -> DonorMatch {
        let profile = &self.profile;
        let mut score = 0;
        let mut reasons = Vec::new();

        // 1. 血型匹配度
        if donor.blood_type == recipient.blood_type {
            score += profile.exact_match_points;
            reasons.push(MatchReason::ExactTypeMatch);
        } else {
            score += profile.compatible_points;
            reasons.push(MatchReason::CompatibleType);
        }

        // 2. 捐献间隔
        match donor.last_donation_date {
            Some(last) => {
                let days_since = (today - last).num_days();
                if days_since > profile.donation_window_days {
                    score += profile.donation_window_points;
                    reasons.push(MatchReason::EligibleDonationWindow);
                }
                // 窗口内: 不加分也不排除
            }
            None => {
                score += profile.first_time_points;
                reasons.push(MatchReason::FirstTimeDonor);
            }
        }

        // 3. 捐献史
        if donor.total_donations > profile.experienced_threshold {
            score += profile.experienced_points;
            reasons.push(MatchReason::ExperiencedDonor);
        } else if donor.total_donations > 0 {
            score += profile.previous_donor_points;
            reasons.push(MatchReason::PreviousDonor);
        }

        // 4. 可联系（固定项）
        score += profile.availability_points;
        reasons.push(MatchReason::AvailableForContact);

        DonorMatch {
            donor: donor.clone(),
            score: score.min(100),
            reasons,
        }
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for DonorMatcher {
    fn default() -> Self {
        Self::new()
    }
}
