//! # 婚恋模块 - 共享类型和工具
//!
//! 本模块提供性格测验系统的共享类型定义和 Trait 接口。
//!
//! ## 功能概述
//!
//! - **类型定义**：兼容性画像、大五人格、依恋类型、MBTI、情商、测验报告
//! - **Trait 接口**：答题存储、报告存储、身份验证
//!
//! ## 模块结构
//!
//! ```text
//! pallet-matchmaking-common
//! ├── types.rs    # 共享类型定义
//! └── traits.rs   # Trait 接口定义
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod types;
pub mod traits;

pub use types::*;
pub use traits::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_from_score_boundaries() {
        assert_eq!(CompatibilityColor::from_score(100), CompatibilityColor::Green);
        assert_eq!(CompatibilityColor::from_score(65), CompatibilityColor::Green);
        assert_eq!(CompatibilityColor::from_score(64), CompatibilityColor::Yellow);
        assert_eq!(CompatibilityColor::from_score(40), CompatibilityColor::Yellow);
        assert_eq!(CompatibilityColor::from_score(39), CompatibilityColor::Red);
        assert_eq!(CompatibilityColor::from_score(0), CompatibilityColor::Red);
    }

    #[test]
    fn mbti_axes_cover_all_sixteen_codes() {
        let mut codes = sp_std::vec::Vec::new();
        for e in [false, true] {
            for n in [false, true] {
                for f in [false, true] {
                    for j in [false, true] {
                        codes.push(MbtiType::from_axes(e, n, f, j).code());
                    }
                }
            }
        }
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), 16);

        for mbti in MbtiType::ALL {
            let code = mbti.code().as_bytes();
            let rebuilt = MbtiType::from_axes(
                code[0] == b'E',
                code[1] == b'N',
                code[2] == b'F',
                code[3] == b'J',
            );
            assert_eq!(rebuilt, mbti);
        }
    }

    #[test]
    fn temperament_grouping() {
        assert_eq!(MbtiType::Intj.temperament(), Temperament::Rational);
        assert_eq!(MbtiType::Enfp.temperament(), Temperament::Idealist);
        assert_eq!(MbtiType::Istj.temperament(), Temperament::Guardian);
        assert_eq!(MbtiType::Esfp.temperament(), Temperament::Artisan);
    }

    #[test]
    fn eq_mean_rounds() {
        let eq = EqProfile {
            self_awareness: 100,
            self_regulation: 100,
            motivation: 100,
            empathy: 100,
            social_skills: 2,
        };
        // (402 + 2) / 5 = 80
        assert_eq!(eq.mean(), 80);
    }
}
