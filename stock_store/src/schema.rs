// `rowid` is SQLite's implicit row id; the table declares no key of its own.

diesel::table! {
    stock_data (rowid) {
        rowid -> BigInt,
        date -> Date,
        open -> Double,
        low -> Double,
        high -> Double,
        close -> Double,
        adj_close -> Double,
        volume -> BigInt,
        symbol -> Text,
    }
}
