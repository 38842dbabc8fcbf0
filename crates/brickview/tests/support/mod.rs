use brickview::dataset::SqliteDataset;
use rusqlite::Connection;
use tempfile::TempDir;

const SCHEMA: &str = "
    CREATE TABLE agents (
        Agent_ID INTEGER PRIMARY KEY, Name TEXT NOT NULL, rating REAL, experience_years INTEGER,
        deals_closed INTEGER, commission_rate REAL, avg_closing_days INTEGER
    );
    CREATE TABLE listings (
        Listing_ID INTEGER PRIMARY KEY, City TEXT, Property_Type TEXT, Price INTEGER,
        Sqft INTEGER, Date_Listed TEXT, Agent_ID INTEGER REFERENCES agents(Agent_ID),
        Latitude REAL, Longitude REAL
    );
    CREATE TABLE sales (
        Listing_ID INTEGER PRIMARY KEY REFERENCES listings(Listing_ID), Sale_Price INTEGER,
        Date_Sold TEXT, Days_on_Market INTEGER
    );
    CREATE TABLE buyers (
        buyer_id INTEGER PRIMARY KEY, sale_id INTEGER REFERENCES sales(Listing_ID),
        buyer_type TEXT, loan_taken INTEGER, loan_amount REAL, payment_mode TEXT
    );
    CREATE TABLE property_attributes (
        attribute_id INTEGER PRIMARY KEY, listing_id INTEGER REFERENCES listings(Listing_ID),
        bedrooms INTEGER, bathrooms INTEGER, year_built INTEGER, parking_available INTEGER,
        power_backup INTEGER, furnishing_status TEXT, metro_distance_km REAL, is_rented INTEGER
    );
";

const SEED: &str = "
    INSERT INTO agents VALUES
        (1, 'Maya Chen', 4.8, 9, 120, 0.025, 21),
        (2, 'Omar Reyes', 4.2, 4, 45, 0.03, 34),
        (3, 'Priya Nair', 4.5, 6, 80, 0.02, 27);
    INSERT INTO listings VALUES
        (1, 'Austin', 'Condo', 250000, 900, '2024-01-05', 1, 30.2672, -97.7431),
        (2, 'Denver', 'House', 640000, 2100, '2024-01-11', 2, 39.7392, -104.9903),
        (3, 'Austin', 'House', 480000, 1500, '2024-02-20', 3, 30.3005, -97.7010),
        (4, 'Boise', 'Villa', 910000, 3200, '2024-02-28', 1, NULL, NULL),
        (5, 'Denver', 'Condo', 315000, 0, '2024-03-15', 2, 39.7500, -104.9800),
        (6, 'Austin', 'Condo', 199000, 780, '2024-04-02', 1, 30.2500, -97.7500);
    INSERT INTO sales VALUES
        (2, 655000, '2024-02-01', 21),
        (3, 470000, '2024-05-30', 100),
        (4, 925000, '2024-03-20', 21);
    INSERT INTO buyers VALUES
        (1, 2, 'End User', 1, 450000, 'Bank Transfer'),
        (2, 3, 'Investor', 0, NULL, 'Cash'),
        (3, 4, 'Investor', 1, 600000, 'Bank Transfer');
    INSERT INTO property_attributes VALUES
        (1, 1, 2, 1, 2015, 1, 0, 'Furnished', 0.8, 0),
        (2, 2, 4, 3, 1998, 1, 1, 'Unfurnished', 4.2, 0),
        (3, 3, 3, 2, 2008, 0, 1, 'Semi-Furnished', 2.5, 1),
        (4, 4, 5, 4, 2021, 1, 1, 'Furnished', 7.0, 0),
        (5, 5, 2, 2, 2012, 0, 0, 'Unfurnished', 1.1, 1),
        (6, 6, 1, 1, 2019, 1, 0, 'Furnished', 0.4, 0);
";

/// A populated dataset in a temporary directory; keep the guard alive for the test.
pub fn seeded_dataset() -> (TempDir, SqliteDataset) {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("real_estate.sqlite");
    let conn = Connection::open(&path).expect("create dataset");
    conn.execute_batch(SCHEMA).expect("create schema");
    conn.execute_batch(SEED).expect("seed dataset");
    drop(conn);
    (dir, SqliteDataset::new(path))
}
