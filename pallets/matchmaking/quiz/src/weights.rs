//! # Matchmaking Quiz Pallet Weights
//!
//! 性格测验模块权重定义

use frame_support::{traits::Get, weights::Weight};

/// 权重信息 Trait
pub trait WeightInfo {
    fn submit_answer() -> Weight;
    fn submit_answers(n: u32) -> Weight;
    fn retake_quiz() -> Weight;
}

/// Substrate 权重实现
///
/// 提交答案的权重包含完成测验时生成画像并写入报告的开销。
pub struct SubstrateWeight<T>(core::marker::PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    fn submit_answer() -> Weight {
        Weight::from_parts(45_000_000, 0)
            .saturating_add(T::DbWeight::get().reads(4))
            .saturating_add(T::DbWeight::get().writes(7))
    }
    fn submit_answers(n: u32) -> Weight {
        Weight::from_parts(45_000_000, 0)
            .saturating_add(Weight::from_parts(1_200_000, 0).saturating_mul(n as u64))
            .saturating_add(T::DbWeight::get().reads(4))
            .saturating_add(T::DbWeight::get().writes(7))
    }
    fn retake_quiz() -> Weight {
        Weight::from_parts(20_000_000, 0)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
}

/// 默认权重实现（用于测试）
impl WeightInfo for () {
    fn submit_answer() -> Weight { Weight::from_parts(45_000_000, 0) }
    fn submit_answers(n: u32) -> Weight {
        Weight::from_parts(45_000_000, 0)
            .saturating_add(Weight::from_parts(1_200_000, 0).saturating_mul(n as u64))
    }
    fn retake_quiz() -> Weight { Weight::from_parts(20_000_000, 0) }
}
