extern crate regex;
use self::regex::Regex;

pub fn is_well_formed_frame_id(input: &str) -> bool {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"^[A-Z0-9]{4}$").unwrap();
    }

    RE.is_match(input)
}
