use std::fmt::Display;
use std::str::FromStr;

use log::debug;

macro_rules! define_config {
    ($(($field:ident: $type:ty, $name:literal, $min:expr, $max:expr, $default:expr)),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub struct SearchConfig {
            $(pub $field: ConfigParam<$type>,)*
        }

        impl Default for SearchConfig {
            fn default() -> Self {
                Self {
                    $($field: ConfigParam {
                        name: $name,
                        value: $default,
                        min: $min,
                        max: $max,
                    },)*
                }
            }
        }

        impl SearchConfig {
            pub fn update(&mut self, name: &str, value: &str) -> Result<(), String> {
                match name {
                    $($name => self.$field.update(value),)*
                    _ => Err(format!("Unknown parameter: {}", name)),
                }
            }

            /// `name = value [min, max]` for every parameter.
            pub fn describe(&self) -> Vec<String> {
                vec![$(self.$field.describe(),)*]
            }
        }
    };
}

define_config!(
    // History tables - gravity ceiling and depth-scaled bonus
    (history_max_value: i32, "History Max Value", 1024, 32000, 16384), // Maximum history score (absolute value)
    (history_bonus_scale: i32, "History Bonus Scale", 0, 1000, 180), // Bonus per unit of depth
    (history_bonus_offset: i32, "History Bonus Offset", -500, 500, 60), // Subtracted from the scaled depth
    (history_bonus_max: i32, "History Bonus Max", 0, 8000, 1800), // Cap for deep searches

    // Static exchange piece values
    (see_pawn_value: i32, "SEE Pawn Value", 0, 300, 100),
    (see_knight_value: i32, "SEE Knight Value", 0, 600, 300),
    (see_bishop_value: i32, "SEE Bishop Value", 0, 600, 300),
    (see_rook_value: i32, "SEE Rook Value", 0, 1000, 500),
    (see_queen_value: i32, "SEE Queen Value", 0, 2000, 900),
);

impl SearchConfig {
    /// Exchange values indexed by piece, king last at zero.
    pub fn see_values(&self) -> [i32; 6] {
        [
            self.see_pawn_value.value,
            self.see_knight_value.value,
            self.see_bishop_value.value,
            self.see_rook_value.value,
            self.see_queen_value.value,
            0,
        ]
    }
}

#[derive(Debug, Clone)]
pub struct ConfigParam<T> {
    pub name: &'static str,
    pub value: T,
    pub min: T,
    pub max: T,
}

impl<T> ConfigParam<T>
where
    T: FromStr + Display + PartialOrd + Copy,
    T::Err: Display,
{
    pub fn update(&mut self, value: &str) -> Result<(), String> {
        let new_value = value
            .trim()
            .parse::<T>()
            .map_err(|e| format!("Parse error: {}", e))?;

        if new_value < self.min || new_value > self.max {
            return Err(format!(
                "{} must be between {} and {}, got {}",
                self.name, self.min, self.max, new_value
            ));
        }

        debug!("{}: {} -> {}", self.name, self.value, new_value);
        self.value = new_value;
        Ok(())
    }

    pub fn describe(&self) -> String {
        format!("{} = {} [{}, {}]", self.name, self.value, self.min, self.max)
    }
}
