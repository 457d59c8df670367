/// Logical camera action a host window maps physical keys onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveForward,
    MoveBackward,
    StrafeLeft,
    StrafeRight,
    TurnLeft,
    TurnRight,
    ResetPose,
}

/// Controller - exposes held-action state to the camera host.
pub trait Controller {
    /// Check if the action is currently held.
    fn is_down(&self, action: Action) -> bool;
}

/// Per-frame movement snapshot derived from held actions.
///
/// Sign conventions: forward, strafe-left and turn-left are positive, their
/// opposites negative, zero when neither or both of a pair is held.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct InputAxes {
    pub move_forward: f32,
    pub move_strafe: f32,
    pub turn: f32,
}

impl InputAxes {
    pub fn from_controller(controller: &dyn Controller) -> Self {
        Self {
            move_forward: axis(
                controller.is_down(Action::MoveForward),
                controller.is_down(Action::MoveBackward),
            ),
            move_strafe: axis(
                controller.is_down(Action::StrafeLeft),
                controller.is_down(Action::StrafeRight),
            ),
            turn: axis(
                controller.is_down(Action::TurnLeft),
                controller.is_down(Action::TurnRight),
            ),
        }
    }
}

const fn axis(positive: bool, negative: bool) -> f32 {
    match (positive, negative) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockController {
        held: Vec<Action>,
    }

    impl Controller for MockController {
        fn is_down(&self, action: Action) -> bool {
            self.held.contains(&action)
        }
    }

    #[test]
    fn idle_controller_yields_zero_axes() {
        let controller = MockController { held: vec![] };
        assert_eq!(InputAxes::from_controller(&controller), InputAxes::default());
    }

    #[test]
    fn held_actions_map_to_signed_axes() {
        let controller = MockController {
            held: vec![Action::MoveForward, Action::StrafeRight, Action::TurnLeft],
        };
        let axes = InputAxes::from_controller(&controller);

        assert_eq!(axes.move_forward, 1.0);
        assert_eq!(axes.move_strafe, -1.0);
        assert_eq!(axes.turn, 1.0);
    }

    #[test]
    fn opposing_actions_cancel() {
        let controller = MockController {
            held: vec![Action::MoveForward, Action::MoveBackward],
        };
        assert_eq!(InputAxes::from_controller(&controller).move_forward, 0.0);
    }
}
