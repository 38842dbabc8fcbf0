use super::{ChartKind, ChartSpec, InsightQuery};

pub(super) static CATALOG: [InsightQuery; 30] = [
    InsightQuery {
        number: 1,
        label: "1. What is the average listing price by city?",
        sql: "\
        select City ,
        Avg(price) as Avg_Price
        from listings
        group by city",
        chart: Some(ChartSpec {
            kind: ChartKind::Bar,
            x: "City",
            y: "Avg_Price",
        }),
    },
    InsightQuery {
        number: 2,
        label: "2. What is the average price per square foot by property type?",
        sql: "\
        SELECT Property_Type,
            ROUND(AVG(Price / Sqft), 2) AS Avg_Price_Per_Sqft
        FROM listings
        WHERE Sqft > 0
        GROUP BY Property_Type",
        chart: Some(ChartSpec {
            kind: ChartKind::Bar,
            x: "Property_Type",
            y: "Avg_Price_Per_Sqft",
        }),
    },
    InsightQuery {
        number: 3,
        label: "3. How does furnishing status impact property prices?",
        sql: "\
        SELECT
            p.furnishing_status,
            COUNT(*) AS total_listings,
            AVG(l.price) AS avg_price,
            AVG(l.price / l.sqft) AS avg_price_per_sqft
        FROM listings l
        JOIN property_attributes p
            ON l.listing_id = p.listing_id
        WHERE l.sqft > 0
        GROUP BY p.furnishing_status
        ORDER BY avg_price_per_sqft DESC;",
        chart: Some(ChartSpec {
            kind: ChartKind::Bar,
            x: "furnishing_status",
            y: "avg_price_per_sqft",
        }),
    },
    InsightQuery {
        number: 4,
        label: "4. Do properties closer to metro stations command higher prices?",
        sql: "\
        SELECT
            CASE
                WHEN pa.Metro_Distance_Km <= 1 THEN '0–1 km'
                WHEN pa.Metro_Distance_Km <= 3 THEN '1–3 km'
                WHEN pa.Metro_Distance_Km <= 5 THEN '3–5 km'
                ELSE '5+ km'
            END AS metro_distance_bucket,
            COUNT(*) AS listings,
            ROUND(AVG(l.Price), 2) AS avg_price,
            ROUND(AVG(l.Price * 1.0 / l.sqft), 2) AS avg_price_per_sqft
        FROM listings l
        JOIN property_attributes pa
        ON l.Listing_ID = pa.Listing_ID
        GROUP BY metro_distance_bucket
        ORDER BY MIN(pa.Metro_Distance_Km);",
        chart: None,
    },
    InsightQuery {
        number: 5,
        label: "5. Are rented properties priced differently from non-rented ones?",
        sql: "\
        SELECT
            p.is_rented ,
            COUNT(*) AS total_listings,
            AVG(l.price) AS avg_price,
            AVG(l.price / l.sqft) AS avg_price_per_sqft
        FROM listings l
        JOIN property_attributes p
            ON l.listing_id = p.listing_id
        WHERE l.sqft > 0
        GROUP BY p.is_rented ;",
        chart: Some(ChartSpec {
            kind: ChartKind::Bar,
            x: "is_rented",
            y: "avg_price",
        }),
    },
    InsightQuery {
        number: 6,
        label: "6. How do bedrooms and bathrooms affect pricing?",
        sql: "\
        SELECT
            p.bedrooms ,
            p.bathrooms,
            COUNT(*) AS total_listings,
            AVG(l.price) AS avg_price,
            AVG(l.price / l.sqft) AS avg_price_per_sqft
        FROM listings l
        JOIN property_attributes p
            ON l.listing_id = p.listing_id
        WHERE l.sqft > 0
        GROUP BY p.bedrooms, p.bathrooms
        order by p.bedrooms, p.bathrooms;",
        chart: None,
    },
    InsightQuery {
        number: 7,
        label: "7. Do properties with parking and power backup sell at higher prices?",
        sql: "\
        SELECT
            p.parking_available ,
            p.power_backup,
            COUNT(*) AS total_listings,
            ROUND(AVG(l.price),2) AS avg_price,
            AVG(l.price / l.sqft) AS avg_price_per_sqft
        FROM listings l
        JOIN property_attributes p
            ON l.listing_id = p.listing_id
        WHERE l.sqft > 0
        GROUP BY p.parking_available, p.power_backup
        order by avg_price_per_sqft desc;",
        chart: None,
    },
    InsightQuery {
        number: 8,
        label: "8. How does year built influence listing price?",
        sql: "\
        SELECT
            p.year_built ,
            COUNT(*) AS total_listings,
            ROUND(AVG(l.price),2) AS avg_price,
            AVG(l.price / l.sqft) AS avg_price_per_sqft
        FROM listings l
        JOIN property_attributes p
            ON l.listing_id = p.listing_id
        WHERE l.sqft > 0
        GROUP BY p.year_built
        order by avg_price_per_sqft desc;",
        chart: Some(ChartSpec {
            kind: ChartKind::Line,
            x: "year_built",
            y: "avg_price",
        }),
    },
    InsightQuery {
        number: 9,
        label: "9. Which cities have the highest median property prices?",
        sql: "\
        WITH ranked AS (
            SELECT
                City,
                Price,
                ROW_NUMBER() OVER (PARTITION BY City ORDER BY Price) AS rn,
                COUNT(*) OVER (PARTITION BY City) AS cnt
            FROM listings
        )
        SELECT
            City,
            ROUND(AVG(Price), 2) AS median_price
        FROM ranked
        WHERE rn IN ((cnt + 1) / 2, (cnt + 2) / 2)
        GROUP BY City
        ORDER BY median_price DESC;",
        chart: Some(ChartSpec {
            kind: ChartKind::Bar,
            x: "City",
            y: "median_price",
        }),
    },
    InsightQuery {
        number: 10,
        label: "10. How are properties distributed across price buckets?",
        sql: "\
        SELECT
            CASE
                WHEN Price < 500000 THEN 'Below 5L'
                WHEN Price BETWEEN 500000 AND 1000000 THEN '5L - 10L'
                WHEN Price BETWEEN 1000000 AND 2000000 THEN '10L - 20L'
                ELSE 'Above 20L'
            END AS price_bucket,
            COUNT(*) AS property_count
        FROM listings
        GROUP BY price_bucket",
        chart: Some(ChartSpec {
            kind: ChartKind::Pie,
            x: "price_bucket",
            y: "property_count",
        }),
    },
    InsightQuery {
        number: 11,
        label: "11. Average Days on Market by City",
        sql: "\
        SELECT
            l.City,
            AVG(s.Days_on_Market) AS average_days_on_market
        FROM sales s
        INNER JOIN listings l
            ON s.Listing_ID = l.Listing_ID
        GROUP BY l.City",
        chart: Some(ChartSpec {
            kind: ChartKind::Bar,
            x: "City",
            y: "average_days_on_market",
        }),
    },
    InsightQuery {
        number: 12,
        label: "12. Fastest Selling Property Types",
        sql: "\
        SELECT
            l.Property_Type,
            AVG(s.Days_on_Market) AS average_days_on_market
        FROM sales s
        INNER JOIN listings l
            ON s.Listing_ID = l.Listing_ID
        GROUP BY l.Property_Type
        ORDER BY average_days_on_market",
        chart: Some(ChartSpec {
            kind: ChartKind::Bar,
            x: "Property_Type",
            y: "average_days_on_market",
        }),
    },
    InsightQuery {
        number: 13,
        label: "13. Percentage of Properties Sold Above Listing Price",
        sql: "\
        SELECT
            (COUNT(CASE WHEN s.Sale_Price > l.Price THEN 1 END) * 100.0) / COUNT(*)
                AS percent_sold_above_listing
        FROM listings l
        JOIN sales s
            ON l.Listing_ID = s.Listing_ID;",
        chart: None,
    },
    InsightQuery {
        number: 14,
        label: "14. Sale-to-List Price Ratio by City",
        sql: "\
        SELECT
            l.City,
            AVG(s.Sale_Price / l.Price) AS sale_to_list_ratio
        FROM listings l
        JOIN sales s
            ON l.Listing_ID = s.Listing_ID
        GROUP BY l.City",
        chart: Some(ChartSpec {
            kind: ChartKind::Bar,
            x: "City",
            y: "sale_to_list_ratio",
        }),
    },
    InsightQuery {
        number: 15,
        label: "15. Listings Taking More Than 90 Days to Sell",
        sql: "\
        SELECT
            l.Listing_ID,
            l.City,
            l.Property_Type,
            s.Days_on_Market
        FROM listings l
        JOIN sales s
            ON l.Listing_ID = s.Listing_ID
        WHERE s.Days_on_Market > 90",
        chart: None,
    },
    InsightQuery {
        number: 16,
        label: "16. Impact of Metro Distance on Time on Market",
        sql: "\
        SELECT
            p.metro_distance_km,
            AVG(s.Days_on_Market) AS avg_days_on_market
        FROM property_attributes p
        JOIN listings l
            ON p.Listing_ID = l.Listing_ID
        JOIN sales s
            ON l.Listing_ID = s.Listing_ID
        GROUP BY p.metro_distance_km
        ORDER BY p.metro_distance_km",
        chart: Some(ChartSpec {
            kind: ChartKind::Line,
            x: "metro_distance_km",
            y: "avg_days_on_market",
        }),
    },
    InsightQuery {
        number: 17,
        label: "17. Monthly Sales Trend",
        sql: "\
        SELECT
            strftime('%Y-%m', Date_Sold) AS sale_month,
            COUNT(*) AS total_sales
        FROM sales
        GROUP BY sale_month
        ORDER BY sale_month",
        chart: Some(ChartSpec {
            kind: ChartKind::Line,
            x: "sale_month",
            y: "total_sales",
        }),
    },
    InsightQuery {
        number: 18,
        label: "18. Properties Currently Unsold",
        sql: "\
        SELECT
            l.Listing_ID,
            l.City,
            l.Property_Type,
            l.Price
        FROM listings l
        LEFT JOIN sales s
            ON l.Listing_ID = s.Listing_ID
        WHERE s.Listing_ID IS NULL",
        chart: None,
    },
    InsightQuery {
        number: 19,
        label: "19. Agents with Most Sales Closed",
        sql: "\
        SELECT
            a.Agent_ID,
            a.Name,
            COUNT(s.Listing_ID) AS total_sales_closed
        FROM agents a
        JOIN listings l
            ON a.Agent_ID = l.Agent_ID
        JOIN sales s
            ON l.Listing_ID = s.Listing_ID
        GROUP BY a.Agent_ID, a.Name
        ORDER BY total_sales_closed DESC",
        chart: Some(ChartSpec {
            kind: ChartKind::Bar,
            x: "Name",
            y: "total_sales_closed",
        }),
    },
    InsightQuery {
        number: 20,
        label: "20. Top Agents by Total Sales Revenue",
        sql: "\
        SELECT
            a.Agent_ID,
            a.Name,
            SUM(s.Sale_Price) AS total_sales_revenue
        FROM agents a
        JOIN listings l
            ON a.Agent_ID = l.Agent_ID
        JOIN sales s
            ON l.Listing_ID = s.Listing_ID
        GROUP BY a.Agent_ID, a.Name
        ORDER BY total_sales_revenue DESC",
        chart: Some(ChartSpec {
            kind: ChartKind::Bar,
            x: "Name",
            y: "total_sales_revenue",
        }),
    },
    InsightQuery {
        number: 21,
        label: "21. Which agents close deals fastest?",
        sql: "\
        SELECT
            Agent_ID,
            Name,
            avg_closing_days
        FROM agents
        ORDER BY avg_closing_days ASC",
        chart: Some(ChartSpec {
            kind: ChartKind::Bar,
            x: "Name",
            y: "avg_closing_days",
        }),
    },
    InsightQuery {
        number: 22,
        label: "22. Does experience correlate with deals closed?",
        sql: "\
        SELECT
            experience_years,
            AVG(deals_closed) AS avg_deals_closed
        FROM agents
        GROUP BY experience_years
        ORDER BY experience_years;",
        chart: Some(ChartSpec {
            kind: ChartKind::Bar,
            x: "experience_years",
            y: "avg_deals_closed",
        }),
    },
    InsightQuery {
        number: 23,
        label: "23. Do agents with higher ratings close deals faster?",
        sql: "\
        SELECT
            Agent_ID,
            Name,
            rating,
            avg_closing_days
        FROM agents
        ORDER BY rating DESC, avg_closing_days ASC;",
        chart: Some(ChartSpec {
            kind: ChartKind::Bar,
            x: "rating",
            y: "avg_closing_days",
        }),
    },
    InsightQuery {
        number: 24,
        label: "24. What is the average commission earned by each agent?",
        sql: "\
        SELECT
            a.Agent_ID,
            a.Name,
            AVG(s.Sale_Price * a.commission_rate) AS avg_commission
        FROM agents a
        JOIN listings l
            ON a.Agent_ID = l.Agent_ID
        JOIN sales s
            ON l.Listing_ID = s.Listing_ID
        GROUP BY a.Agent_ID, a.Name",
        chart: Some(ChartSpec {
            kind: ChartKind::Bar,
            x: "Name",
            y: "avg_commission",
        }),
    },
    InsightQuery {
        number: 25,
        label: "25. Which agents currently have the most active listings?",
        sql: "\
        SELECT
            a.Agent_ID,
            a.Name,
            COUNT(l.Listing_ID) AS active_listings
        FROM agents a
        JOIN listings l
            ON a.Agent_ID = l.Agent_ID
        LEFT JOIN sales s
            ON l.Listing_ID = s.Listing_ID
        WHERE s.Listing_ID IS NULL
        GROUP BY a.Agent_ID, a.Name
        ORDER BY active_listings DESC;",
        chart: Some(ChartSpec {
            kind: ChartKind::Bar,
            x: "Name",
            y: "active_listings",
        }),
    },
    InsightQuery {
        number: 26,
        label: "26. What percentage of buyers are investors vs end users?",
        sql: "\
        SELECT
            buyer_type,
            COUNT(*) * 100.0 / (SELECT COUNT(*) FROM buyers) AS percentage
        FROM buyers
        GROUP BY buyer_type",
        chart: Some(ChartSpec {
            kind: ChartKind::Pie,
            x: "buyer_type",
            y: "percentage",
        }),
    },
    InsightQuery {
        number: 27,
        label: "27. Which cities have the highest loan uptake rate?",
        sql: "\
        SELECT
            l.City,
            COUNT(CASE WHEN b.loan_taken = 1 THEN 1 END) * 100.0 / COUNT(*) AS loan_uptake_rate
        FROM buyers b
        JOIN sales s
            ON b.sale_id = s.Listing_ID
        JOIN listings l
            ON s.Listing_ID = l.Listing_ID
        GROUP BY l.City
        ORDER BY loan_uptake_rate DESC;",
        chart: Some(ChartSpec {
            kind: ChartKind::Bar,
            x: "City",
            y: "loan_uptake_rate",
        }),
    },
    InsightQuery {
        number: 28,
        label: "28. What is the average loan amount by buyer type?",
        sql: "\
        SELECT
            buyer_type,
            AVG(loan_amount) AS avg_loan_amount
        FROM buyers
        WHERE loan_taken = 1
        GROUP BY buyer_type",
        chart: Some(ChartSpec {
            kind: ChartKind::Bar,
            x: "buyer_type",
            y: "avg_loan_amount",
        }),
    },
    InsightQuery {
        number: 29,
        label: "29. Which payment mode is most commonly used?",
        sql: "\
        SELECT
            payment_mode,
            COUNT(*) AS usage_count
        FROM buyers
        GROUP BY payment_mode
        ORDER BY usage_count DESC",
        chart: Some(ChartSpec {
            kind: ChartKind::Bar,
            x: "payment_mode",
            y: "usage_count",
        }),
    },
    InsightQuery {
        number: 30,
        label: "30. Do loan-backed purchases take longer to close?",
        sql: "\
        SELECT
            b.loan_taken,
            AVG(s.Days_on_Market) AS avg_days_on_market
        FROM buyers b
        JOIN sales s
            ON b.sale_id = s.Listing_ID
        GROUP BY b.loan_taken",
        chart: Some(ChartSpec {
            kind: ChartKind::Bar,
            x: "loan_taken",
            y: "avg_days_on_market",
        }),
    },
];
