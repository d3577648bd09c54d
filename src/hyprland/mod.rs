//! Hyprland-specific implementations.
//!
//! [`monitors`] lists connected monitors through the compositor's control
//! utility, run by the [`ProcessRunner`](crate::traits::ProcessRunner) in
//! [`hyprctl`].
//!
//! Nothing outside this module should reference `hyprctl` directly.

pub mod hyprctl;
pub mod monitors;
