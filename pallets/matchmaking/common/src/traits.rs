//! # 婚恋模块 - Trait 定义
//!
//! 测验系统各组件之间的接口，通过 `Config` 关联类型注入。

use crate::types::*;
use frame_support::pallet_prelude::*;
use sp_std::collections::btree_map::BTreeMap;

/// 答题存储 Trait
pub trait QuizAnswerStore<AccountId> {
    /// 答题记录类型
    type Record;

    /// 获取用户答题记录
    fn get(who: &AccountId) -> Option<Self::Record>;

    /// 保存用户答题记录
    ///
    /// `completed` 为 true 时，答案必须覆盖全部必答题。
    fn save(
        who: &AccountId,
        answers: BTreeMap<QuestionId, OptionIndex>,
        completed: bool,
    ) -> Result<Self::Record, DispatchError>;
}

/// 报告存储 Trait
pub trait QuizReportStore<AccountId, BlockNumber> {
    /// 创建或覆盖用户报告（按用户唯一）
    fn create(
        who: &AccountId,
        quiz_id: u32,
        profile: CompatibilityProfile,
        is_paid: bool,
    ) -> Result<QuizReport<AccountId, BlockNumber>, DispatchError>;

    /// 更新付费状态
    fn update_payment_status(
        report_id: ReportId,
        is_paid: bool,
    ) -> Result<QuizReport<AccountId, BlockNumber>, DispatchError>;

    /// 获取用户报告
    fn report_of(who: &AccountId) -> Option<QuizReport<AccountId, BlockNumber>>;
}

/// 身份验证提供者 Trait
pub trait QuizAuthProvider<AccountId> {
    /// 账户会话是否有效
    fn is_authenticated(who: &AccountId) -> bool;
}

impl<AccountId> QuizAuthProvider<AccountId> for () {
    fn is_authenticated(_who: &AccountId) -> bool {
        true
    }
}
