//=========================================================================
// Action Trait
//=========================================================================
//
// Stage-defined action identifiers bound to interactive controls.
//
// A control fires its action on release; the engine routes it back to
// the owning stage without interpreting it.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt::Debug;
use std::hash::Hash;

//=== Action Trait ========================================================

/// Marker trait for stage-defined action enums.
///
/// Actions represent what a control does when clicked (ConnectWallet,
/// Claim, Finish). Controls carry them opaquely and hand them back to the
/// stage that owns the control.
///
/// # Requirements
///
/// - `Copy + Eq + Hash`: Efficient passing and comparison
/// - `Debug`: Logging support
/// - `Send + 'static`: Stages live on the core thread
///
/// # Example
///
/// ```
/// use tap_claim::prelude::*;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum MenuAction { Claim, ConnectWallet }
///
/// impl Action for MenuAction {}
/// ```
pub trait Action: 'static + Send + Copy + Eq + Hash + Debug {}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestAction {
        Claim,
        Connect,
    }

    impl Action for TestAction {}

    #[test]
    fn action_is_hashable() {
        let mut set = HashSet::new();
        set.insert(TestAction::Claim);
        set.insert(TestAction::Claim);
        set.insert(TestAction::Connect);

        assert_eq!(set.len(), 2);
        assert!(set.contains(&TestAction::Claim));
    }

    #[test]
    fn action_is_send_and_static() {
        fn assert_bounds<T: Send + 'static>() {}
        assert_bounds::<TestAction>();
    }
}
