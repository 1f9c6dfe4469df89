//! # Matchmaking Report Pallet Benchmarking
//!
//! 测验报告模块基准测试

#![cfg(feature = "runtime-benchmarks")]

use super::*;
use frame_benchmarking::v2::*;
use pallet::*;

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn set_payment_status() -> Result<(), BenchmarkError> {
        let owner: T::AccountId = whitelisted_caller();
        let report = <Pallet<T> as QuizReportStore<_, _>>::create(
            &owner,
            0,
            CompatibilityProfile::default(),
            false,
        )
        .map_err(|_| BenchmarkError::Stop("setup failed"))?;
        let origin = T::PaymentOrigin::try_successful_origin()
            .map_err(|_| BenchmarkError::Weightless)?;

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, report.id, true);

        let stored = Reports::<T>::get(report.id).ok_or(BenchmarkError::Stop("missing report"))?;
        assert!(stored.is_paid);
        Ok(())
    }

    impl_benchmark_test_suite!(Pallet, crate::mock::new_test_ext(), crate::mock::Test);
}
