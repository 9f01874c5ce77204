use std::fmt::Display;
use num_traits::PrimInt;

/// CellCoord (Cell coordinate) represents the coordinate of a cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellCoord<T = usize>
    where T: PrimInt
{
    pub x: T,
    pub y: T,
}

impl<T: PrimInt> CellCoord<T> {
    /// Create a new cell coordinate.
    pub fn new(x: T, y: T) -> Self {
        CellCoord { x, y }
    }
}

impl<T> Display for CellCoord<T>
    where T: PrimInt + std::fmt::Debug
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// CellState represents the state of a cell on the board.
/// It is one of `Off` (dead), `On` (alive) or `Wall` (inert - a wall never
/// takes part in the live/dead cycle).
///
/// The discriminant doubles as the digit used by the board text format.
/// ## Examples
/// Create a new `Off` cell state, and change it to `On`.
/// ``` ignore
/// let mut state = CellState::Off;
/// state = CellState::On;
/// assert_eq!(state, CellState::On); // The cell is `On` now
///
/// match state {
///     CellState::Off => println!("It is an Off cell"),
///     CellState::On => println!("It is an On cell"),
///     CellState::Wall => println!("It is a Wall cell"),
/// }
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CellState {
    #[default]
    Off = 0,
    On = 1,
    Wall = 2,
}

impl CellState {
    /// Create the state a live/dead toggle lands on. `On` becomes `Off` and
    /// vice versa; a `Wall` is left untouched.
    /// ## Examples
    /// ``` ignore
    /// let state = CellState::On;
    /// let new_state = state.into_toggled();
    /// assert_eq!(new_state, CellState::Off); // The `new_state` is `Off`
    /// assert_eq!(state, CellState::On); // The `state` remains `On`
    /// ```
    pub fn into_toggled(self) -> Self {
        match self {
            CellState::On => CellState::Off,
            CellState::Off => CellState::On,
            CellState::Wall => CellState::Wall,
        }
    }

    /// Create the state a wall toggle lands on. A `Wall` becomes `Off`; any
    /// other state becomes a `Wall`.
    /// ## Examples
    /// ``` ignore
    /// let state = CellState::Wall;
    /// let new_state = state.into_wall_toggled();
    /// assert_eq!(new_state, CellState::Off); // The wall is knocked down
    /// ```
    pub fn into_wall_toggled(self) -> Self {
        match self {
            CellState::Wall => CellState::Off,
            _ => CellState::Wall,
        }
    }

    /// Check if the cell state is `Off`.
    pub fn is_off(&self) -> bool {
        *self == CellState::Off
    }

    /// Check if the cell state is `On`.
    pub fn is_on(&self) -> bool {
        *self == CellState::On
    }

    /// Check if the cell state is `Wall`.
    pub fn is_wall(&self) -> bool {
        *self == CellState::Wall
    }

    /// Cast a single `CellState` to u8 (byte).
    /// ## Examples
    /// ``` ignore
    /// let byte = CellState::Wall.as_u8();
    /// assert_eq!(byte, 2_u8);
    /// ```
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }

    /// The digit this state serializes to (`'0'`, `'1'` or `'2'`).
    pub fn as_digit(&self) -> char {
        (b'0' + self.as_u8()) as char
    }

    /// Parse a serialized digit back into a `CellState`. Returns `None` for
    /// any character outside `{'0', '1', '2'}`.
    /// ## Examples
    /// ``` ignore
    /// assert_eq!(CellState::from_digit('2'), Some(CellState::Wall));
    /// assert_eq!(CellState::from_digit('5'), None);
    /// ```
    pub fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '0' => Some(CellState::Off),
            '1' => Some(CellState::On),
            '2' => Some(CellState::Wall),
            _ => None,
        }
    }
}

impl From<CellState> for u8 {
    /// Convert `CellState` to u8 (byte).
    /// ## Examples
    /// ``` ignore
    /// let state = CellState::On;
    /// let byte: u8 = state.into();
    /// ```
    fn from(value: CellState) -> Self {
        value.as_u8()
    }
}

impl Display for CellState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
