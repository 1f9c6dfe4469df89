//! # Matchmaking Quiz Pallet Benchmarking
//!
//! 性格测验模块基准测试

#![cfg(feature = "runtime-benchmarks")]

use super::*;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;
use pallet::*;
use sp_std::vec::Vec;

/// 按题号生成 n 条答案
fn answers_for<T: Config>(n: u32) -> BoundedVec<(QuestionId, OptionIndex), T::MaxAnswers> {
    let entries: Vec<(QuestionId, OptionIndex)> = questions::QUESTIONS
        .iter()
        .take(n as usize)
        .map(|q| (q.id, 0))
        .collect();
    BoundedVec::truncate_from(entries)
}

#[benchmarks]
mod benchmarks {
    use super::*;

    // 最后一道必答题，触发画像生成
    #[benchmark]
    fn submit_answer() -> Result<(), BenchmarkError> {
        let caller: T::AccountId = whitelisted_caller();
        let required = questions::REQUIRED_QUESTIONS as u32;
        Pallet::<T>::record_answers(&caller, &answers_for::<T>(required - 1))
            .map_err(|_| BenchmarkError::Stop("setup failed"))?;

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), required as QuestionId, 0);

        let quiz = QuizAnswers::<T>::get(&caller).ok_or(BenchmarkError::Stop("missing quiz"))?;
        assert!(quiz.completed);
        Ok(())
    }

    #[benchmark]
    fn submit_answers(n: Linear<1, 24>) {
        let caller: T::AccountId = whitelisted_caller();
        let answers = answers_for::<T>(n);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), answers);

        assert!(QuizAnswers::<T>::contains_key(&caller));
    }

    #[benchmark]
    fn retake_quiz() -> Result<(), BenchmarkError> {
        let caller: T::AccountId = whitelisted_caller();
        Pallet::<T>::record_answers(&caller, &answers_for::<T>(questions::REQUIRED_QUESTIONS as u32))
            .map_err(|_| BenchmarkError::Stop("setup failed"))?;

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()));

        let quiz = QuizAnswers::<T>::get(&caller).ok_or(BenchmarkError::Stop("missing quiz"))?;
        assert_eq!(quiz.attempt, 1);
        Ok(())
    }

    impl_benchmark_test_suite!(Pallet, crate::mock::new_test_ext(), crate::mock::Test);
}
