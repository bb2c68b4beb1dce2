use crate::error::TelecheckError;
use std::fmt;
use std::str::FromStr;

macro_rules! state_codes {
    ($($variant:ident),+ $(,)?) => {
        /// A two-letter US state or territory code.
        ///
        /// Used for the holder's state, the bank's state and the driver license state.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum StateCode {
            $($variant),+
        }

        impl StateCode {
            /// Every recognized code.
            pub const ALL: &[StateCode] = &[$(StateCode::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(StateCode::$variant => stringify!($variant)),+
                }
            }
        }

        impl FromStr for StateCode {
            type Err = TelecheckError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $(stringify!($variant) => Ok(StateCode::$variant),)+
                    other => Err(TelecheckError::InvalidStateCode(other.to_string())),
                }
            }
        }
    };
}

// The 50 states plus DC.
state_codes!(
    AL, AK, AZ, AR, CA, CO, CT, DE, DC, FL, GA, HI, ID, IL, IN, IA, KS, KY, LA, ME, MD, MA, MI,
    MN, MS, MO, MT, NE, NV, NH, NJ, NM, NY, NC, ND, OH, OK, OR, PA, RI, SC, SD, TN, TX, UT, VT,
    VA, WA, WI, WV, WY,
);

impl StateCode {
    pub fn is_recognized(code: &str) -> bool {
        code.parse::<StateCode>().is_ok()
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
