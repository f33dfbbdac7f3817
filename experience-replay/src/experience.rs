/// An experience is a quadruple `(x, a, y, r)`, meaning that the execution of
/// an action `a` in a state `x` results in a new state `y` and reward `r`.
///
/// It is a plain value. Once constructed it is only ever copied, never changed.
#[derive(Clone, Debug, PartialEq)]
pub struct Experience<S, A> {
    pub state: S,
    pub action: A,
    pub next_state: S,
    pub reward: f32,
}

impl<S, A> Experience<S, A> {
    pub fn new(state: S, action: A, next_state: S, reward: f32) -> Self {
        Self {
            state,
            action,
            next_state,
            reward,
        }
    }
}
