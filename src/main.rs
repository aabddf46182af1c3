mod entry;

use reqgen::error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
