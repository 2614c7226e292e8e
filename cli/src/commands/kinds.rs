use argtype_core::Kind;

use crate::terminal::print;

pub fn kinds() {
    for kind in Kind::ALL {
        print::print_status(kind.name());
    }
    print::end_of_program();
}
