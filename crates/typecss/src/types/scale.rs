//! Named lengths for the spacing scale.
//!
//! Steps are multiples of `0.25rem`: `SIZE_4` is `1rem`, `SIZE_0_5` is
//! `0.125rem`.

use super::Length;

pub const SIZE_0: Length = Length::ZERO;
pub const SIZE_PX: Length = Length::px(1.0);
pub const SIZE_0_5: Length = Length::rem(0.125);
pub const SIZE_1: Length = Length::rem(0.25);
pub const SIZE_1_5: Length = Length::rem(0.375);
pub const SIZE_2: Length = Length::rem(0.5);
pub const SIZE_2_5: Length = Length::rem(0.625);
pub const SIZE_3: Length = Length::rem(0.75);
pub const SIZE_3_5: Length = Length::rem(0.875);
pub const SIZE_4: Length = Length::rem(1.0);
pub const SIZE_5: Length = Length::rem(1.25);
pub const SIZE_6: Length = Length::rem(1.5);
pub const SIZE_7: Length = Length::rem(1.75);
pub const SIZE_8: Length = Length::rem(2.0);
pub const SIZE_9: Length = Length::rem(2.25);
pub const SIZE_10: Length = Length::rem(2.5);
pub const SIZE_11: Length = Length::rem(2.75);
pub const SIZE_12: Length = Length::rem(3.0);
pub const SIZE_14: Length = Length::rem(3.5);
pub const SIZE_16: Length = Length::rem(4.0);
pub const SIZE_20: Length = Length::rem(5.0);
pub const SIZE_24: Length = Length::rem(6.0);
pub const SIZE_28: Length = Length::rem(7.0);
pub const SIZE_32: Length = Length::rem(8.0);
pub const SIZE_36: Length = Length::rem(9.0);
pub const SIZE_40: Length = Length::rem(10.0);
pub const SIZE_44: Length = Length::rem(11.0);
pub const SIZE_48: Length = Length::rem(12.0);
pub const SIZE_52: Length = Length::rem(13.0);
pub const SIZE_56: Length = Length::rem(14.0);
pub const SIZE_60: Length = Length::rem(15.0);
pub const SIZE_64: Length = Length::rem(16.0);
pub const SIZE_72: Length = Length::rem(18.0);
pub const SIZE_80: Length = Length::rem(20.0);
pub const SIZE_96: Length = Length::rem(24.0);

/// `100%`.
pub const FULL: Length = Length::percent(100.0);
/// `50%`.
pub const HALF: Length = Length::percent(50.0);
/// `auto`.
pub const AUTO: Length = Length::auto();
